//! Инфраструктурный слой: RNG-реализации для перемешивания колод.

pub mod rng;

pub use rng::*;

use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn isbn(&self) -> String;
    fn price(&self) -> f64;
}

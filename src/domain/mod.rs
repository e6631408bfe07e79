// Domain layer: hardware spec models, tiers, activities and ports. No transport concerns here.

pub mod model;
pub mod ports;

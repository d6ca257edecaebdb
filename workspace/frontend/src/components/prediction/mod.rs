mod chart;
mod controls;
mod forecast_table;
mod view;

pub use view::Prediction;

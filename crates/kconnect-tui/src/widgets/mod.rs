pub mod legend;
pub mod state_indicator;

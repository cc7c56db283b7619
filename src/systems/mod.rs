pub mod chart;
pub mod kinematics;

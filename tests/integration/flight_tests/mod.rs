mod config;
mod controls;
mod engine;
mod kinematics;

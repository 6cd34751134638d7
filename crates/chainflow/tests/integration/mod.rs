mod cli;
mod config_flow;

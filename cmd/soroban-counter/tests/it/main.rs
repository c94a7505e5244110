mod config;
mod counter;
mod hello;
mod util;

mod controls;
mod flight;
mod missions;
mod plugin;
mod session;

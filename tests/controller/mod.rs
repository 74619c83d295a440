mod auth;
mod celestial;
mod extract;

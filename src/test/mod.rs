mod extract;
mod market_hours;
mod models;

mod capacity;
mod scenarios;

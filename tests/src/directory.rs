mod persistence;
mod scenario;

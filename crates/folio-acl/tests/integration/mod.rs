mod authorization;
mod concurrency;

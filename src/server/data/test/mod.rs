mod expense;
mod fuel;
mod maintenance;
mod trip;
mod user;

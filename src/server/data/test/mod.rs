mod booking;
mod role;
mod room;
mod user;

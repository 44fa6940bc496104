mod avatar;
mod role;
mod user;

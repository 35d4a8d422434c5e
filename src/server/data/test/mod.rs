mod player;
mod question;
mod quiz;
mod timer;
mod user;

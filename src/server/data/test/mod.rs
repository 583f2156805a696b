mod artist;
mod group;
mod notification;
mod release;

mod card;
mod help;

use crate::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![card::card(), help::help()]
}

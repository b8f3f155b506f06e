// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use holidaze_core::Session;

use crate::context::Context;

#[derive(Debug, Clone)]
pub struct CmdSessionSet {
    pub name: String,
    pub token: String,
    pub email: Option<String>,
    pub api_key: Option<String>,
    pub manager: bool,
}

impl CmdSessionSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("login")
            .about("Store the profile and access token used for bookings")
            .arg(arg!(name: <NAME> "Profile name"))
            .arg(arg!(-t --token <TOKEN> "Access token from the login endpoint").required(true))
            .arg(arg!(-e --email <EMAIL> "Profile e-mail"))
            .arg(arg!(--"api-key" <KEY> "API key, overrides the configured one"))
            .arg(arg!(--manager "The profile manages venues"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: matches
                .get_one::<String>("name")
                .cloned()
                .expect("name is required"),
            token: matches
                .get_one::<String>("token")
                .cloned()
                .expect("token is required"),
            email: matches.get_one("email").cloned(),
            api_key: matches.get_one("api-key").cloned(),
            manager: matches.get_flag("manager"),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(name = %self.name, "storing session...");
        let path = ctx.session_path()?;
        let session = Session {
            name: self.name,
            email: self.email,
            access_token: self.token,
            api_key: self.api_key,
            venue_manager: self.manager,
        };
        session.save(&path).await?;

        println!("Signed in as {}.", session.name.bold());
        ctx.session = Some(session);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdSessionShow;

impl CmdSessionShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the stored profile")
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        match &ctx.session {
            Some(session) => {
                println!("{} {}", "Profile:".bold(), session.name);
                if let Some(email) = &session.email {
                    println!("{} {email}", "E-mail:".bold());
                }
                let role = match session.venue_manager {
                    true => "venue manager",
                    false => "customer",
                };
                println!("{} {role}", "Role:".bold());
                let key = match session.api_key {
                    Some(_) => "from session",
                    None => "from config",
                };
                println!("{} {key}", "API key:".bold());
            }
            None => println!("Not signed in."),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdSessionClear;

impl CmdSessionClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("logout")
            .about("Forget the stored profile")
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        let path = ctx.session_path()?;
        match Session::clear(&path).await? {
            true => println!("Signed out."),
            false => println!("Not signed in."),
        }
        ctx.session = None;
        Ok(())
    }
}

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cryptography::ecdsa;
use crate::option::Optional;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Element type used when decoding into `Optional<T>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Int,
    Float,
    String,
    Bool,
    /// Any JSON value
    Any,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON document into an optional value
    Decode {
        /// Element type of the optional
        #[arg(short, long, value_enum, default_value_t = Kind::Any)]
        kind: Kind,

        /// JSON text; `null` means absent
        json: String,
    },

    /// Print the wire form of an optional value
    Encode {
        /// Element type of the optional
        #[arg(short, long, value_enum, default_value_t = Kind::Any)]
        kind: Kind,

        /// JSON text of the inner value (omit for absent)
        json: Option<String>,
    },

    /// Sign and verify a message with a throwaway P-256 key
    SignDemo {
        /// Message to sign
        #[arg(short, long)]
        message: String,
    },
}

pub struct CliHandler<W: Write> {
    out: W,
}

impl<W: Write> CliHandler<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn handle_command(&mut self, args: Vec<String>) -> Result<()> {
        let cli = Cli::try_parse_from(args)?;
        self.execute(cli)
    }

    pub fn execute(&mut self, cli: Cli) -> Result<()> {
        match cli.command {
            Commands::Decode { kind, json } => {
                debug!("decoding {:?} from {} bytes", kind, json.len());
                match kind {
                    Kind::Int => self.decode::<i64>(&json),
                    Kind::Float => self.decode::<f64>(&json),
                    Kind::String => self.decode::<String>(&json),
                    Kind::Bool => self.decode::<bool>(&json),
                    Kind::Any => self.decode::<serde_json::Value>(&json),
                }
            }

            Commands::Encode { kind, json } => match kind {
                Kind::Int => self.encode::<i64>(json.as_deref()),
                Kind::Float => self.encode::<f64>(json.as_deref()),
                Kind::String => self.encode::<String>(json.as_deref()),
                Kind::Bool => self.encode::<bool>(json.as_deref()),
                Kind::Any => self.encode::<serde_json::Value>(json.as_deref()),
            },

            Commands::SignDemo { message } => self.sign_demo(&message),
        }
    }

    fn decode<T: DeserializeOwned + Serialize>(&mut self, json: &str) -> Result<()> {
        let value = Optional::<T>::from_json(json)?;
        match value.reference() {
            Some(inner) => writeln!(self.out, "present: {}", serde_json::to_string(inner)?)?,
            None => writeln!(self.out, "absent")?,
        }
        Ok(())
    }

    fn encode<T: DeserializeOwned + Serialize>(&mut self, json: Option<&str>) -> Result<()> {
        let value = match json {
            Some(json) => Optional::<T>::from_json(json)?,
            None => Optional::none(),
        };
        writeln!(self.out, "{}", value.to_json()?)?;
        Ok(())
    }

    fn sign_demo(&mut self, message: &str) -> Result<()> {
        let key = ecdsa::generate_key()?;
        let public = ecdsa::public_key(&key)?;
        let signature = ecdsa::sign(&key, message.as_bytes())?;
        let valid = ecdsa::verify(&public, message.as_bytes(), &signature);
        info!("signed {} byte message, signature is {} bytes", message.len(), signature.len());

        writeln!(self.out, "public_key: {}", hex::encode(ecdsa::public_key_bytes(&public)?))?;
        writeln!(self.out, "signature: {}", hex::encode(&signature))?;
        writeln!(self.out, "valid: {}", valid)?;
        Ok(())
    }
}

use crate::config::DEFAULT_DATA_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imobiliaria-leon")]
#[command(about = "Manage Imobiliária Leon property listings")]
pub struct Cli {
    /// JSON file the listings and admin flag are stored in
    #[arg(long, global = true, env = "IMOBILIARIA_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all properties
    List,
    /// Show one property with its gallery
    Show { id: String },
    /// Add a property (admin only)
    Add(AddArgs),
    /// Delete a property (admin only)
    Delete {
        id: String,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// Manage gallery photos (admin only)
    #[command(subcommand)]
    Photo(PhotoCommands),
    /// Unlock admin operations
    Login { password: String },
    /// Lock admin operations again
    Logout,
    /// Report whether admin operations are unlocked
    Whoami,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub nome: String,
    /// Casa or Terreno
    #[arg(long, default_value = "Casa")]
    pub tipo: String,
    #[arg(long, default_value = "")]
    pub preco: String,
    #[arg(long, default_value = "")]
    pub localizacao: String,
    /// URL of the primary image
    #[arg(long = "imagem", default_value = "")]
    pub imagem_principal: String,
    #[arg(long, default_value = "")]
    pub descricao: String,
}

#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
    /// Append a photo URL to the gallery
    Add { id: String, url: String },
    /// Remove a photo URL from the gallery
    Remove { id: String, url: String },
}

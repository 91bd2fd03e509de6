use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the recipe-admin binary.
#[derive(Debug, Parser)]
#[command(
    name = "recipe-admin",
    version,
    about = "Administer the users and recipes of a recipe backend"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "RECIPE_ADMIN_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the backend base URL.
    #[arg(long = "api-base-url", value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Override the request timeout.
    #[arg(long = "api-timeout-seconds", value_name = "SECONDS", global = true)]
    pub api_timeout_seconds: Option<u64>,

    /// Override the number of rows per listed page.
    #[arg(long = "page-size", value_name = "COUNT", global = true)]
    pub page_size: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Manage users.
    Users(UsersArgs),
    /// Manage recipes.
    Recipes(RecipesArgs),
}

#[derive(Debug, Args, Clone)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum UsersCommand {
    /// List one page of users.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a user.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Initial password (also read from RECIPE_ADMIN_USER_PASSWORD).
        #[arg(long, env = "RECIPE_ADMIN_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Edit a user; omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user.
    Delete { id: String },
}

#[derive(Debug, Args, Clone)]
pub struct RecipesArgs {
    #[command(subcommand)]
    pub action: RecipesCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum RecipesCommand {
    /// List one page of recipes.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a recipe.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long = "image-url")]
        image_url: String,
    },
    /// Edit a recipe; omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "image-url")]
        image_url: Option<String>,
    },
    /// Delete a recipe.
    Delete { id: String },
}

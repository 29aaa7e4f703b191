//! CLI commands
//!
//! Each subcommand runs one session operation and prints the outcome.

use clap::{Args, Subcommand};
use stargazer_client::Credentials;
use stargazer_state::{AppContext, SessionState};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account with name, email and password
    Register(RegisterArgs),
    /// Sign in with email and password
    Login(LoginArgs),
    /// Create an account from a Google access token
    SignupGoogle(GoogleArgs),
    /// Sign in with a Google access token
    SigninGoogle(GoogleArgs),
    /// Forget the stored session
    Logout,
    /// Fetch the NASA image of the day
    Image {
        /// Only fetch when the cached image was not added today
        #[arg(long)]
        if_stale: bool,
    },
    /// Show the stored session
    Status,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "STARGAZER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "STARGAZER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
pub struct GoogleArgs {
    /// Access token obtained from Google sign-in
    #[arg(long, env = "STARGAZER_GOOGLE_TOKEN", hide_env_values = true)]
    access_token: String,
}

fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.trim().is_empty())
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::Login(_) => "login",
            Self::SignupGoogle(_) => "signup-google",
            Self::SigninGoogle(_) => "signin-google",
            Self::Logout => "logout",
            Self::Image { .. } => "image",
            Self::Status => "status",
        }
    }

    /// Run the command against `ctx`
    pub async fn run(self, ctx: &AppContext) {
        match self {
            Self::Register(args) => {
                if any_blank(&[&args.name, &args.email, &args.password]) {
                    ctx.display_alert();
                } else {
                    ctx.register_user(Credentials::register(args.name, args.email, args.password))
                        .await;
                }
            }
            Self::Login(args) => {
                if any_blank(&[&args.email, &args.password]) {
                    ctx.display_alert();
                } else {
                    ctx.login_user(Credentials::login(args.email, args.password))
                        .await;
                }
            }
            Self::SignupGoogle(args) => ctx.signup_google(&args.access_token).await,
            Self::SigninGoogle(args) => ctx.signin_google(&args.access_token).await,
            Self::Logout => ctx.logout_user(),
            Self::Image { if_stale: true } => {
                if !ctx.fetch_nasa_image_if_stale().await {
                    println!("Using today's cached image");
                }
            }
            Self::Image { if_stale: false } => ctx.fetch_nasa_image().await,
            Self::Status => {}
        }

        print_state(&ctx.state());
    }
}

fn print_state(state: &SessionState) {
    if state.show_alert {
        let kind = state.alert_type.map(|t| t.as_str()).unwrap_or("info");
        println!("[{}] {}", kind, state.alert_text);
    }

    match &state.user {
        Some(user) if state.is_authenticated() => {
            println!("Signed in as {} <{}>", user.name, user.email)
        }
        _ => println!("Not signed in"),
    }

    if let Some(image) = &state.nasa_image_details {
        println!(
            "Image: {}",
            image.title.as_deref().unwrap_or("(untitled)")
        );
        if let Some(url) = image.hdurl.as_deref().or(image.url.as_deref()) {
            println!("  {}", url);
        }
        if let Some(date) = &image.date {
            println!("  published {}", date);
        }
    }
}

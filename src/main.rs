use anyhow::Context;
use clap::{Parser, Subcommand};
use portfolio_contact::clipboard::SystemClipboard;
use portfolio_contact::domain::FormField;
use portfolio_contact::notifier::ConsoleNotifier;
use portfolio_contact::site::SOCIAL_LINKS;
use portfolio_contact::{
    ContactForm, SubmitError, get_configuration, get_subscriber, init_subscriber,
};

#[derive(Parser)]
#[command(
    name = "portfolio-contact",
    version,
    about = "Send a message through the portfolio contact form"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the fields and deliver the message
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Copy the contact address to the clipboard
    CopyEmail,
    /// Print the social profile links
    Links,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("portfolio-contact".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let mut form = ContactForm::from_settings(&configuration.contact);

    match cli.command {
        Command::Send {
            name,
            email,
            message,
        } => {
            let email_client = configuration
                .email_client
                .client()
                .context("Failed to build the email client.")?;
            form.update_field(FormField::Name, name);
            form.update_field(FormField::Email, email);
            form.update_field(FormField::Message, message);

            match form.submit(&email_client, &ConsoleNotifier).await {
                Ok(()) => {}
                Err(SubmitError::Invalid(errors)) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{}: {}", field, message);
                    }
                    anyhow::bail!("The message was not sent.");
                }
                Err(e) => return Err(e).context("The message was not sent."),
            }
        }
        Command::CopyEmail => {
            form.copy_email_to_clipboard(&SystemClipboard).await;
            if form.is_copied() {
                println!("Copied! {}", form.contact_email());
            } else {
                println!("{}", form.contact_email());
            }
        }
        Command::Links => {
            for link in SOCIAL_LINKS {
                println!("{:<10} {}", link.name, link.href);
            }
        }
    }
    Ok(())
}

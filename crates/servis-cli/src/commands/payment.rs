//! Drive the payment endpoints of a running server.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use tracing::debug;

use servis_client::{CreatePayment, PaymentClient, UpdatePayment};
use servis_core::error::AppError;
use servis_core::types::{OrderId, PaymentId};
use servis_entity::payment::{PaymentMethod, PaymentStatus};

use crate::output::{self, OutputFormat, PaymentRow};

/// Arguments for the payment command
#[derive(Debug, Args)]
pub struct PaymentArgs {
    /// API base URL
    #[arg(long, env = "SERVIS_URL", default_value = "http://localhost:8080/api")]
    pub url: String,

    /// Bearer token (see `servis token`)
    #[arg(long, env = "SERVIS_TOKEN")]
    pub token: Option<String>,

    /// Payment subcommand
    #[command(subcommand)]
    pub command: PaymentCommand,
}

/// Payment subcommands
#[derive(Debug, Subcommand)]
pub enum PaymentCommand {
    /// Show the payment of an order
    Get {
        /// Order id
        order_id: OrderId,
    },
    /// Record the payment of an order
    Create {
        /// Order id
        order_id: OrderId,
        #[arg(long)]
        amount: Decimal,
        /// CASH, TRANSFER, EWALLET or OTHER
        #[arg(long)]
        method: PaymentMethod,
        /// UNPAID, PAID, FAILED or REFUNDED
        #[arg(long, default_value = "UNPAID")]
        status: PaymentStatus,
        #[arg(long)]
        transaction_ref: Option<String>,
    },
    /// Update a payment; only the given fields change
    Update {
        /// Payment id
        payment_id: PaymentId,
        #[arg(long)]
        amount: Option<Decimal>,
        #[arg(long)]
        method: Option<PaymentMethod>,
        #[arg(long)]
        status: Option<PaymentStatus>,
        #[arg(long, conflicts_with = "clear_ref")]
        transaction_ref: Option<String>,
        /// Remove the stored transaction reference
        #[arg(long)]
        clear_ref: bool,
    },
}

/// Execute payment commands
pub async fn execute(args: &PaymentArgs, format: OutputFormat) -> Result<(), AppError> {
    debug!(url = %args.url, authenticated = args.token.is_some(), "Calling payment API");
    let mut client = PaymentClient::new(&args.url)?;
    if let Some(token) = &args.token {
        client = client.with_token(token);
    }

    let payment = match &args.command {
        PaymentCommand::Get { order_id } => client.get_payment(*order_id).await?,
        PaymentCommand::Create {
            order_id,
            amount,
            method,
            status,
            transaction_ref,
        } => {
            let body = CreatePayment {
                amount: *amount,
                method: *method,
                status: *status,
                transaction_ref: transaction_ref.clone(),
            };
            client.create_payment(*order_id, &body).await?
        }
        PaymentCommand::Update {
            payment_id,
            amount,
            method,
            status,
            transaction_ref,
            clear_ref,
        } => {
            let transaction_ref = if *clear_ref {
                Some(None)
            } else {
                transaction_ref.clone().map(Some)
            };
            let body = UpdatePayment {
                amount: *amount,
                method: *method,
                status: *status,
                transaction_ref,
            };
            client.update_payment(*payment_id, &body).await?
        }
    };

    output::print_list(&[PaymentRow::from(&payment)], format);
    Ok(())
}

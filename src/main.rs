use std::env;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use smsgw::config::Settings;
use smsgw::utils;
use smsgw::GatewayClient;

struct SendArgs {
    recipients: Vec<String>,
    message: String,
    schedule: Option<NaiveDateTime>,
}

fn usage() {
    eprintln!("usage: smsgw <recipient>... -m <message> [--at \"YYYY-MM-DD HH:mm\"]");
    eprintln!("       recipients may also be given as one comma-joined argument");
}

fn parse_args(args: &[String]) -> Result<SendArgs, String> {
    let mut recipients = Vec::new();
    let mut message = None;
    let mut schedule = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-m" | "--message" => {
                message = Some(iter.next().ok_or("missing value for --message")?.clone());
            }
            "--at" => {
                let raw = iter.next().ok_or("missing value for --at")?;
                let at = utils::parse_schedule_time(raw)
                    .map_err(|_| format!("bad schedule time {raw:?}, expected YYYY-MM-DD HH:mm"))?;
                schedule = Some(at);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option {other:?}"));
            }
            other => {
                recipients.extend(other.split(',').map(|r| r.trim().to_string()));
            }
        }
    }

    let message = message.ok_or("no message given")?;
    if recipients.is_empty() {
        return Err("no recipients given".to_string());
    }
    Ok(SendArgs {
        recipients,
        message,
        schedule,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let send = match parse_args(&args) {
        Ok(send) => send,
        Err(e) => {
            eprintln!("smsgw: {}", e);
            usage();
            return ExitCode::from(2);
        }
    };

    let settings = Settings::load();
    let client = match GatewayClient::new(&settings) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("smsgw: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client
        .send_bulk(&send.recipients, &send.message, send.schedule)
        .await
    {
        Ok(data) => {
            println!("SMS accepted by gateway");
            if !data.is_null() {
                println!("{}", data);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("smsgw: {}", e);
            ExitCode::FAILURE
        }
    }
}

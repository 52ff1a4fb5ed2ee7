//! mdb-web binary: serve static files and proxy /mdb-lookup queries.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use log::error;
use mdb_web::{ServerConfig, WebServer};

fn usage(program: &str) -> ! {
    eprintln!("usage: {program} <server-port> <web-root> <mdb-lookup-host> <mdb-lookup-port>");
    process::exit(1);
}

fn parse_port(arg: &str) -> u16 {
    match arg.parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("invalid port: {arg}");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        usage(&args[0]);
    }

    let port = parse_port(&args[1]);
    let config = ServerConfig {
        addr: SocketAddr::from(([0, 0, 0, 0], port)),
        web_root: PathBuf::from(&args[2]),
        lookup_host: args[3].clone(),
        lookup_port: parse_port(&args[4]),
    };

    let mut server = match WebServer::new(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("{e}");
        process::exit(1);
    }
}

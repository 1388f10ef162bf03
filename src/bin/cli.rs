//! labinv Interactive Client
//!
//! Menu-driven terminal client for the inventory server: builds requests
//! from prompted input and prints response envelopes.

use std::io::{self, BufRead, Write};

use clap::Parser;
use labinv::protocol::Response;
use labinv::store::Status;
use labinv::{InventoryClient, Record, RecordDraft};

/// labinv CLI
#[derive(Parser, Debug)]
#[command(name = "labinv-cli")]
#[command(about = "Cliente de inventario de equipos de laboratorio")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5555")]
    server: String,
}

fn main() {
    let args = Args::parse();

    let mut client = match InventoryClient::connect(&args.server) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("No se pudo conectar al servidor en {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    println!("Conectado al servidor en {}", args.server);

    loop {
        print_menu();
        match prompt("Opción: ").as_str() {
            "1" => run(register(&mut client)),
            "2" => run(client.list()),
            "3" => {
                let code = prompt("Código del equipo: ");
                run(client.find(&code));
            }
            "4" => {
                let code = prompt("Código del equipo: ");
                print_statuses();
                let status = prompt("Nuevo estado: ");
                run(client.update_status(&code, &status));
            }
            "5" => {
                println!("Hasta luego.");
                return;
            }
            other => println!("Opción '{}' no válida.", other),
        }
    }
}

fn register(client: &mut InventoryClient) -> labinv::Result<Response> {
    let draft = RecordDraft {
        code: prompt("Código del equipo: "),
        name: prompt("Nombre del equipo: "),
        kind: prompt("Tipo de equipo: "),
        status: {
            print_statuses();
            prompt("Estado: ")
        },
    };
    client.register(&draft)
}

/// Print the outcome of one exchange, or the transport error that ended it
fn run(result: labinv::Result<Response>) {
    match result {
        Ok(response) => print_response(&response),
        Err(e) => {
            eprintln!("Error en la comunicación: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_response(response: &Response) {
    let marker = if response.is_ok() { "✓" } else { "✗" };
    println!("\n{} {}", marker, response.message);

    if let Some(record) = &response.record {
        print_record(record);
    }
    if let Some(records) = &response.records {
        for record in records {
            print_record(record);
        }
    }
    println!();
}

fn print_record(record: &Record) {
    println!(
        "  [{}] {} ({}) - {} - registrado: {}{}",
        record.code,
        record.name,
        record.kind,
        record.status,
        record.registered_at,
        record
            .last_updated_at
            .as_deref()
            .map(|t| format!(" - actualizado: {}", t))
            .unwrap_or_default()
    );
}

fn print_statuses() {
    println!("Estados válidos:");
    for status in Status::ALL {
        println!("  - {}", status);
    }
}

fn print_menu() {
    println!("========================================");
    println!("  INVENTARIO DE EQUIPOS DE LABORATORIO");
    println!("========================================");
    println!("  1. Registrar equipo");
    println!("  2. Consultar inventario");
    println!("  3. Buscar equipo");
    println!("  4. Actualizar estado");
    println!("  5. Salir");
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().ok();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

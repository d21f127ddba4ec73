use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

use bgp_route_importer::formats::cisco::render_table;
use bgp_route_importer::io::read_dump;
use bgp_route_importer::{
    importer_for, AddressFamilyMode, ImportConfig, ImportFileType, PeerAsType, RouteRecord,
    TargetPeer,
};
use clap::{Parser, ValueEnum};

/// bgp-route-importer is a simple cli tool that imports `show ip bgp` style routing tables.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// File path to a routing table dump, local or remote.
    #[clap(name = "FILE")]
    file_path: PathBuf,

    /// Vendor format of the dump
    #[clap(short = 'f', long, default_value = "cisco")]
    format: String,

    /// Import only best routes
    #[clap(short, long)]
    best_only: bool,

    /// Keep next hops from the table instead of using the local peer address
    #[clap(short = 'n', long)]
    retain_next_hop: bool,

    /// Process routes on a single thread
    #[clap(long)]
    sequential: bool,

    /// Import IPv4 routes only
    #[clap(short = '4', long)]
    ipv4_only: bool,

    /// Import IPv6 routes only
    #[clap(short = '6', long)]
    ipv6_only: bool,

    /// Prefix for generated route names
    #[clap(long, default_value = "route")]
    name_prefix: String,

    /// Name of the target peer
    #[clap(long, default_value = "peer")]
    peer_name: String,

    /// AS type of the target peer
    #[clap(long, value_enum, default_value = "ebgp")]
    peer_as_type: AsTypeArg,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,

    /// Output as full PSV entries with header
    #[clap(long)]
    psv: bool,

    /// Output as a re-rendered routing table
    #[clap(long)]
    table: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,

    /// Count imported routes
    #[clap(short, long)]
    count: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AsTypeArg {
    Ebgp,
    Ibgp,
}

impl From<AsTypeArg> for PeerAsType {
    fn from(value: AsTypeArg) -> Self {
        match value {
            AsTypeArg::Ebgp => PeerAsType::Ebgp,
            AsTypeArg::Ibgp => PeerAsType::Ibgp,
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let address_family = match (opts.ipv4_only, opts.ipv6_only) {
        (true, true) => {
            eprintln!("Error: --ipv4-only and --ipv6-only cannot be used together");
            std::process::exit(1);
        }
        (false, false) => AddressFamilyMode::Auto,
        (true, false) => AddressFamilyMode::Ipv4Only,
        (false, true) => AddressFamilyMode::Ipv6Only,
    };

    let peer = TargetPeer::new(opts.peer_name.as_str(), opts.peer_as_type.into());
    let mut config = ImportConfig::default()
        .with_address_family(address_family)
        .with_best_routes_only(opts.best_only)
        .with_retain_next_hop(opts.retain_next_hop)
        .with_sequential(opts.sequential)
        .with_name_prefix(opts.name_prefix.as_str());
    config = match address_family {
        AddressFamilyMode::Ipv6Only => config.with_v6_peer(peer),
        _ => config.with_v4_peer(peer),
    };

    let file_type = match opts.format.parse::<ImportFileType>() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut importer = match importer_for(file_type, std::process::id()) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let file_path = opts.file_path.to_string_lossy();
    let input = match read_dump(&file_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut routes: Vec<RouteRecord> = vec![];
    let summary = match importer.import_routes(&config, &input, &mut routes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if opts.count {
        println!("total candidates: {}", summary.candidates);
        println!("total routes:     {}", summary.route_names.len());
        println!("total skipped:    {}", summary.skipped.len());
        return;
    }

    let mut stdout = std::io::stdout();
    if opts.table {
        if let Err(e) = write!(stdout, "{}", render_table(&routes)) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
        return;
    }

    for (index, route) in routes.iter().enumerate() {
        let output_str = if opts.json {
            let val = json!(route);
            if opts.pretty {
                serde_json::to_string_pretty(&val).unwrap_or_default()
            } else {
                val.to_string()
            }
        } else if opts.psv {
            if index == 0 {
                format!("{}\n{}", RouteRecord::get_psv_header(), route.to_psv())
            } else {
                route.to_psv()
            }
        } else {
            route.to_string()
        };
        if let Err(e) = writeln!(stdout, "{}", &output_str) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    }
}

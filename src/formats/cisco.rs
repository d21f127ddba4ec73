//! Renders route records as a `show ip bgp` table.
//!
//! The output uses the same fixed columns the importer reads, so rendered tables import back to
//! equivalent records. Networks longer than 16 characters are wrapped onto their own line the way
//! routers print long IPv6 prefixes; a wrapped line longer than the next hop column offset is read
//! back as a next hop, so only networks of exactly 17 characters survive wrapping. Values wider
//! than their column (next hops over 19 characters, numbers over 6 digits) spill into the
//! neighbouring column in the same way.
use crate::models::*;

const LEGEND: [&str; 3] = [
    "Status codes: s suppressed, d damped, h history, * valid, > best, i - internal,",
    "              r RIB-failure, S Stale, m multipath, b backup-path, x best-external",
    "Origin codes: i - IGP, e - EGP, ? - incomplete",
];

const NETWORK_WIDTH: usize = 17;
const NEXT_HOP_WIDTH: usize = 20;

fn format_columns(
    status: &str,
    network: &str,
    next_hop: &str,
    metric: &str,
    local_pref: &str,
    weight: &str,
    path: &str,
) -> String {
    format!(
        "{:<3.3}{:<nw$}{:<hw$}{:>6} {:>6} {:>6} {}",
        status,
        network,
        next_hop,
        metric,
        local_pref,
        weight,
        path,
        nw = NETWORK_WIDTH,
        hw = NEXT_HOP_WIDTH,
    )
}

pub fn table_header() -> String {
    format_columns(
        "", "Network", "Next Hop", "Metric", "LocPrf", "Weight", "Path",
    )
}

/// Formats one route. `show_network` is false when the previous line had the same network.
pub fn format_route(route: &RouteRecord, show_network: bool) -> Vec<String> {
    let status = route.status.to_status_codes();
    let network = route.prefix.to_string();
    let next_hop = match route.next_hop {
        NextHopMode::Manual(addr) => addr.to_string(),
        NextHopMode::Local => match route.afi() {
            Afi::Ipv4 => "0.0.0.0".to_string(),
            Afi::Ipv6 => "::".to_string(),
        },
    };
    let path = match (&route.origin, route.as_path.is_empty()) {
        (Some(origin), true) => origin.table_code().to_string(),
        (Some(origin), false) => format!("{} {}", route.as_path, origin.table_code()),
        (None, _) => route.as_path.to_string(),
    };
    let number = |v: Option<u32>| v.map(|v| v.to_string()).unwrap_or_default();

    let mut lines = vec![];
    let network_column = match show_network {
        true if network.len() < NETWORK_WIDTH => network,
        true => {
            lines.push(format!("{:<3.3}{}", status, network));
            String::new()
        }
        false => String::new(),
    };
    let status_column = match lines.is_empty() {
        true => status.as_str(),
        false => "",
    };
    lines.push(
        format_columns(
            status_column,
            &network_column,
            &next_hop,
            &number(route.med),
            &number(route.local_pref),
            &number(route.weight),
            &path,
        )
        .trim_end()
        .to_string(),
    );
    lines
}

/// Renders a complete table: legend, header and one entry per route in the given order.
pub fn render_table(routes: &[RouteRecord]) -> String {
    let mut lines: Vec<String> = LEGEND.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());
    lines.push(table_header());

    let mut previous: Option<&ipnet::IpNet> = None;
    for route in routes {
        lines.extend(format_route(route, previous != Some(&route.prefix)));
        previous = Some(&route.prefix);
    }

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

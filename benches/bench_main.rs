use bgp_route_importer::formats::cisco::render_table;
use bgp_route_importer::*;
use criterion::{criterion_group, criterion_main, Criterion};
use ipnet::{IpNet, Ipv4Net};
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};

const ROUTES: u32 = 100_000;

/// Renders a full-table sized dump with two paths per prefix.
fn synthetic_table() -> String {
    let routes: Vec<RouteRecord> = (0..ROUTES)
        .map(|i| {
            let prefix = Ipv4Net::new(Ipv4Addr::from(0x0100_0000 + ((i / 2) << 8)), 24).unwrap();
            let status = match i % 2 {
                0 => RouteStatus::VALID,
                _ => RouteStatus::VALID | RouteStatus::BEST,
            };
            RouteRecord {
                name: String::new(),
                row: 0,
                prefix: IpNet::V4(prefix),
                next_hop: NextHopMode::Manual(IpAddr::V4(Ipv4Addr::new(192, 0, 2, (i % 2) as u8 + 1))),
                local_pref: None,
                med: Some(0),
                weight: Some(0),
                origin: Some(Origin::IGP),
                as_path: AsPath::from_segments(vec![
                    AsPathSegment::sequence([2497, 4826, 38803 + i % 100]),
                    AsPathSegment::set([64512, 64513]),
                ]),
                status,
            }
        })
        .collect();
    render_table(&routes)
}

fn import(config: &ImportConfig, table: &[u8]) -> usize {
    let mut importer = CiscoImporter::new(1);
    let mut routes: Vec<RouteRecord> = Vec::with_capacity(ROUTES as usize);
    importer.import_routes(config, table, &mut routes).unwrap();
    routes.len()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let table = synthetic_table();
    let config = ImportConfig::default()
        .with_retain_next_hop(true)
        .with_v4_peer(TargetPeer::new("peer", PeerAsType::Ebgp));

    let mut group = c.benchmark_group("cisco_import");
    group.sample_size(10);

    group.bench_function("parallel", |b| {
        b.iter(|| import(black_box(&config), black_box(table.as_bytes())))
    });

    let sequential = config.clone().with_sequential(true);
    group.bench_function("sequential", |b| {
        b.iter(|| import(black_box(&sequential), black_box(table.as_bytes())))
    });

    let best_only = config.clone().with_best_routes_only(true);
    group.bench_function("best_only", |b| {
        b.iter(|| import(black_box(&best_only), black_box(table.as_bytes())))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

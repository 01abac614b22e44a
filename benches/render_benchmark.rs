use criterion::{Criterion, criterion_group, criterion_main};
use ibus_mozc_gen::branding::Branding;
use ibus_mozc_gen::params::Params;
use ibus_mozc_gen::probe::Features;
use ibus_mozc_gen::props::Tables;
use ibus_mozc_gen::render::{render_cpp, render_xml};
use std::hint::black_box;

fn fixture() -> (Params, Tables, Vec<String>) {
    let params = Params::new(
        Branding::GoogleJapaneseInput,
        "/usr/lib/ibus-mozc/ibus-engine-mozc",
        "/usr/share/ibus-mozc/product_icon.png",
    );
    let tables = Tables::new(Features {
        icon_prop_key: true,
        symbol: true,
    });
    let setup_arg = vec![
        "/usr/lib/mozc/mozc_tool".to_string(),
        "--mode=config_dialog".to_string(),
    ];
    (params, tables, setup_arg)
}

fn bench_render_xml(c: &mut Criterion) {
    let (params, tables, setup_arg) = fixture();
    c.bench_function("render_xml", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1024);
            render_xml(&mut buf, black_box(&params), black_box(&tables), &setup_arg).unwrap();
            buf
        })
    });
}

fn bench_render_cpp(c: &mut Criterion) {
    let (params, tables, _) = fixture();
    c.bench_function("render_cpp", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1024);
            render_cpp(&mut buf, black_box(&params), black_box(&tables)).unwrap();
            buf
        })
    });
}

fn bench_build_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| {
        b.iter(|| Tables::new(black_box(Features::default())))
    });
}

criterion_group!(benches, bench_render_xml, bench_render_cpp, bench_build_tables);
criterion_main!(benches);

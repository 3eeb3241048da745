use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use tango::engine::filter::select_range;
use tango::engine::parser::RecordParser;
use tango::generator::composer::compose;
use tango::generator::{DirectionMode, SelectionCriteria};
use tango::layout::engine::PageLayoutEngine;
use tango::layout::labels::DocumentLabels;
use tango::layout::{LayoutConfig, TestHeader};
use tango::render::{DocumentRenderer, TextRenderer};

fn make_word_list(count: usize) -> String {
    (1..=count)
        .map(|n| format!("{n},word{n},\"たんご, {n}\"\n"))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let text = make_word_list(2000);
    let parser = RecordParser::default();

    c.bench_function("parse (2000 lines)", |b| {
        b.iter(|| parser.parse(black_box(&text)).unwrap())
    });
}

fn bench_compose(c: &mut Criterion) {
    let records = RecordParser::default().parse(&make_word_list(2000)).unwrap();
    let criteria = SelectionCriteria {
        start_num: 100,
        end_num: 1600,
        question_count: 100,
        direction_mode: DirectionMode::Mixed,
    };

    c.bench_function("select_range + compose (100 of 1501)", |b| {
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| {
            let eligible = select_range(black_box(&records), criteria.start_num, criteria.end_num);
            compose(&eligible, &criteria, &mut rng).unwrap()
        })
    });
}

fn bench_layout_and_render(c: &mut Criterion) {
    let records = RecordParser::default().parse(&make_word_list(500)).unwrap();
    let criteria = SelectionCriteria {
        start_num: 1,
        end_num: 500,
        question_count: 200,
        direction_mode: DirectionMode::Mixed,
    };
    let items = compose(&records, &criteria, &mut SmallRng::seed_from_u64(1)).unwrap();
    let config = LayoutConfig::default();
    let labels = DocumentLabels::default();
    let header = TestHeader {
        date: NaiveDate::from_ymd_opt(2024, 4, 7).unwrap(),
    };
    let engine = PageLayoutEngine::new(&config, &labels);

    c.bench_function("layout_document (200 questions)", |b| {
        b.iter(|| engine.layout_document(black_box(&items), &header))
    });

    let doc = engine.layout_document(&items, &header);
    let renderer = TextRenderer::new(80, 66);
    c.bench_function("text render (200 questions)", |b| {
        b.iter(|| renderer.render(black_box(&doc), &config).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_compose, bench_layout_and_render);
criterion_main!(benches);

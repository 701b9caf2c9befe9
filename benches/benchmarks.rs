criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_random_range,
        parsing_plus_range,
        parsing_exact_range,
        scanning_card_mask,
        converting_eval_mask,
}

fn parsing_random_range(c: &mut criterion::Criterion) {
    c.bench_function("parse the random Range", |b| {
        b.iter(|| Range::from(criterion::black_box("random")))
    });
}

fn parsing_plus_range(c: &mut criterion::Criterion) {
    c.bench_function("parse a plus-heavy Range", |b| {
        b.iter(|| Range::from(criterion::black_box("22+,A2s+,K9s+,QTs+,JTs,ATo+,KJo+,QJo")))
    });
}

fn parsing_exact_range(c: &mut criterion::Criterion) {
    let text = Range::from("TT+,AQs+,AKo").to_string();
    c.bench_function("parse a Range of explicit combinations", |b| {
        b.iter(|| Range::from(criterion::black_box(text.as_str())))
    });
}

fn scanning_card_mask(c: &mut criterion::Criterion) {
    c.bench_function("scan a 7-card Hand", |b| {
        b.iter(|| Hand::scan(criterion::black_box("AhKd2c7s9hTdQc")))
    });
}

fn converting_eval_mask(c: &mut criterion::Criterion) {
    let mask = EvalMask::from(Hand::from(Hand::mask()));
    c.bench_function("convert a full EvalMask to a Hand", |b| {
        b.iter(|| Hand::from(criterion::black_box(mask)))
    });
}

use rbp_range::cards::EvalMask;
use rbp_range::cards::Hand;
use rbp_range::range::Range;

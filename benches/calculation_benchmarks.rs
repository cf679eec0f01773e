//! Performance benchmarks for the payslip engine.
//!
//! This benchmark suite tracks the cost of the three pipeline stages:
//! parsing a request line, processing a parsed request, and the full
//! line-to-output-line round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use payslip_engine::models::PayslipRequest;
use payslip_engine::processor::PayslipProcessor;

const REQUEST_LINES: [&str; 4] = [
    "David,Rudd,60050,9%,March",
    "Ryan,Chen,120000,10%,March",
    "Ryan,Chen,18200,1%,February",
    "Ryan,Chen,180001,50%,December",
];

fn bench_parse_request(c: &mut Criterion) {
    c.bench_function("parse_request", |b| {
        b.iter(|| {
            black_box("David,Rudd,60050,9%,March")
                .parse::<PayslipRequest>()
                .unwrap()
        })
    });
}

fn bench_process_request(c: &mut Criterion) {
    let processor = PayslipProcessor::new();
    let request: PayslipRequest = "David,Rudd,60050,9%,March".parse().unwrap();

    c.bench_function("process_request", |b| {
        b.iter(|| processor.process(black_box(&request)).unwrap())
    });
}

fn bench_line_to_output_line(c: &mut Criterion) {
    let processor = PayslipProcessor::new();

    c.bench_function("line_to_output_line", |b| {
        b.iter(|| {
            for line in REQUEST_LINES {
                let request: PayslipRequest = black_box(line).parse().unwrap();
                let result = processor.process(&request).unwrap();
                black_box(result.to_string());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_request,
    bench_process_request,
    bench_line_to_output_line
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use h1_request_line::{parse_line, RequestLine};

const SAMPLE: &[u8] = b"POST /axis2/services/echo HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    group.bench_function(BenchmarkId::new("borrowed", "sample line"), |c| {
        c.iter(|| parse_line(black_box(SAMPLE)))
    });
    group.bench_function(BenchmarkId::new("owned", "sample line"), |c| {
        c.iter(|| RequestLine::parse(black_box(SAMPLE)))
    });
    group.bench_function(BenchmarkId::new("httparse", "sample line"), |c| {
        c.iter(move || {
            let mut headers = [httparse::EMPTY_HEADER; 4];
            let mut req = httparse::Request::new(&mut headers);
            req.parse(black_box(SAMPLE)).unwrap();
            assert_eq!(req.path, Some("/axis2/services/echo"));
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_line");
    let origin = RequestLine::new("POST", "/axis2/services/echo", "HTTP/1.1").unwrap();
    let relative = RequestLine::new("POST", "axis2/services/echo", "HTTP/1.1").unwrap();

    group.bench_function(BenchmarkId::new("to_bytes", "origin form"), |c| {
        c.iter(|| black_box(&origin).to_bytes())
    });
    group.bench_function(BenchmarkId::new("to_bytes", "leading slash"), |c| {
        c.iter(|| black_box(&relative).to_bytes())
    });
}

criterion_group!(parse, bench_parse);
criterion_group!(encode, bench_encode);

criterion_main!(parse, encode);

//! Benchmarks for template conversion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inky::Inky;

/// Builds a newsletter-style template with the given number of sections.
fn create_template(sections: usize) -> String {
    let mut template = String::from("<container>\n");
    for i in 0..sections {
        template.push_str(&format!(
            r##"  <row>
    <columns small="12" large="4"><h4>Section {i}</h4><p>Lorem ipsum &nbsp; dolor.</p></columns>
    <columns small="12" large="8">
      <callout class="primary"><raw><%= items[{i}] %></raw></callout>
      <button class="expand" href="#">Read more</button>
    </columns>
  </row>
  <spacer size="16"></spacer>
"##
        ));
    }
    template.push_str(
        r##"  <center><menu><item href="#">Home</item><item href="#">About</item></menu></center>
</container>"##,
    );
    template
}

fn bench_convert(c: &mut Criterion) {
    let inky = Inky::new();
    let mut group = c.benchmark_group("convert");

    for sections in [1, 10, 50] {
        let template = create_template(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &template, |b, t| {
            b.iter(|| inky.convert(black_box(t)).unwrap())
        });
    }

    group.finish();
}

fn bench_convert_all(c: &mut Criterion) {
    let inky = Inky::new();
    let templates: Vec<String> = (0..32).map(|_| create_template(5)).collect();

    c.bench_function("convert_all_32", |b| {
        b.iter(|| inky.convert_all(black_box(&templates)))
    });
}

criterion_group!(benches, bench_convert, bench_convert_all);
criterion_main!(benches);

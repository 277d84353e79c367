use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use global_common::StringInput;
use parser::{Parser, ParserConfig};

// A mix of the constructs the parser spends its time on: literals, arrows,
// destructuring, classes, templates, control flow.
const UNIT: &str = r#"
const widths = items.map(item => item.width ?? 0);

function total(...xs) {
    let sum = 0;
    for (const x of xs) {
        sum += x;
    }
    return sum;
}

class Box {
    #w = 1;

    get area() {
        return this.#w ** 2;
    }

    static of({ w = 1, h = w } = {}) {
        return new Box(w, h);
    }
}

async function load(url) {
    try {
        const res = await fetch(`${base}/${url}`);
        return res.ok ? res : null;
    } catch (e) {
        log(e);
        return null;
    }
}
"#;

fn bench(c: &mut Criterion) {
    let src = UNIT.repeat(256);
    let config = ParserConfig {
        next: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("script", |b| {
        b.iter(|| {
            let mut parser = Parser::new(config, StringInput::from(&*src));
            black_box(parser.parse_script())
        })
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main, measurement::WallTime,
};
use image::RgbaImage;
use tonepunker::prelude::{Filter, Strategy};

mod utils;

fn bench_filter(
    group: &mut BenchmarkGroup<'_, WallTime>,
    filter: Filter,
    strategy: Strategy,
    image: &RgbaImage,
) {
    let name = format!("{filter}_{strategy:?}").to_lowercase();
    let processor = filter.processor().with_strategy(strategy);

    group.bench_with_input(BenchmarkId::new(name, image.width()), image, |b, image| {
        b.iter(|| {
            let res = processor.process(black_box(image)).unwrap();
            black_box(res);
        });
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_strategy");

    let sizes = [64u32, 256, 512, 1024];
    for size in sizes {
        let image = utils::gen_random_image(size);
        for filter in Filter::ALL {
            for strategy in [Strategy::Seq, Strategy::Par] {
                bench_filter(&mut group, filter, strategy, &image);
            }
        }
    }

    group.finish();
}

criterion_group!(filter_strategy, criterion_benchmark);
criterion_main!(filter_strategy);

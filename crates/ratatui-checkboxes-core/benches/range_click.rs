use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use ratatui_checkboxes_core::checkboxes::Checkboxes;
use ratatui_checkboxes_core::input::ClickEvent;

fn engine(len: usize) -> Checkboxes<String> {
    let items: Vec<String> = (0..len).map(|i| format!("row-{i:05}")).collect();
    let disabled: Vec<String> = items.iter().step_by(7).cloned().collect();
    Checkboxes::builder(items).default_disabled(disabled).build()
}

fn bench_range_click(c: &mut Criterion) {
    let len = 2_000;
    let first = "row-00000".to_string();
    let last = format!("row-{:05}", len - 1);

    c.bench_function("checkboxes/range_click/2k/check+uncheck", |b| {
        b.iter(|| {
            let mut boxes = engine(len);
            boxes.on_click(&ClickEvent::new(), black_box(&first));
            boxes.on_click(&ClickEvent::shift(), black_box(&last));
            boxes.on_click(&ClickEvent::shift(), black_box(&first));
            black_box(boxes.checked_items().len());
        })
    });
}

fn bench_toggle_every_item(c: &mut Criterion) {
    let len = 2_000;
    let items: Vec<String> = (0..len).map(|i| format!("row-{i:05}")).collect();

    c.bench_function("checkboxes/click/2k/each_once", |b| {
        b.iter(|| {
            let mut boxes = engine(len);
            for item in &items {
                boxes.on_click(&ClickEvent::new(), item);
            }
            black_box(boxes.checked_items().len());
        })
    });
}

criterion_group!(benches, bench_range_click, bench_toggle_every_item);
criterion_main!(benches);

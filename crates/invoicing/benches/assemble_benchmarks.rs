use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use storefront_core::Amount;
use storefront_invoicing::{
    DEFAULT_CATEGORIES, InvoiceAssembler, InvoiceNumber, LineItem, Order, OrderStatus, PageLayout,
    render_text,
};

fn order_with(items: usize) -> Order {
    let items: Vec<LineItem> = (0..items)
        .map(|i| {
            // Spread items over every known category plus a few unknown ones.
            let category = if i % 25 < DEFAULT_CATEGORIES.len() {
                DEFAULT_CATEGORIES[i % 25].to_string()
            } else {
                format!("Seasonal {}", i % 25)
            };
            LineItem::new(
                format!("Product number {i} with a longer descriptive name"),
                Some(category),
                Amount::from_paise(1_000 + i as u64),
                (i % 7 + 1) as u32,
            )
            .expect("valid line item")
        })
        .collect();
    let total = Amount::checked_sum(items.iter().map(LineItem::line_total)).expect("no overflow");

    Order {
        invoice_number: InvoiceNumber::new(1).expect("positive"),
        customer_name: Some("Bench Customer".to_string()),
        customer_phone: Some("9000000000".to_string()),
        customer_address: Some("1 Benchmark Road, Sivakasi".to_string()),
        status: OrderStatus::Pending,
        order_date: Utc::now(),
        items,
        total_amount: total,
    }
}

fn bench_assemble(c: &mut Criterion) {
    let assembler = InvoiceAssembler::default();
    let mut group = c.benchmark_group("assemble");

    for size in [10usize, 100, 1_000] {
        let order = order_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &order, |b, order| {
            b.iter(|| assembler.assemble(black_box(order)))
        });
    }

    group.finish();
}

fn bench_render_text(c: &mut Criterion) {
    let plan = InvoiceAssembler::default().assemble(&order_with(200));
    let layout = PageLayout::default();

    c.bench_function("render_text/200", |b| {
        b.iter(|| render_text(black_box(&plan), &layout).expect("render"))
    });
}

criterion_group!(benches, bench_assemble, bench_render_text);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use std::sync::Arc;
use stockroom::{InMemoryInventory, NewProduct, ProductRepository};
use tokio::runtime::Runtime; // To run async code within Criterion
use uuid::Uuid;

fn numbered_draft(i: usize) -> NewProduct {
  NewProduct {
    product_code: format!("P-{:05}", i),
    name: format!("Product {}", i),
    total_stock: Decimal::from(10),
    ..NewProduct::default()
  }
}

fn bench_create_product(c: &mut Criterion) {
  let mut group = c.benchmark_group("GatewayCreate");
  let rt = Runtime::new().unwrap();
  // One shared gateway; it grows over the run, which is representative of a
  // long-lived in-memory backend.
  let repo = Arc::new(InMemoryInventory::new());

  group.throughput(Throughput::Elements(1));
  group.bench_function("create_product", |b| {
    let mut i = 0usize;
    b.to_async(&rt).iter_batched(
      || {
        i += 1;
        numbered_draft(i)
      },
      |draft| {
        let repo = repo.clone();
        async move { repo.create_product(draft).await.unwrap() }
      },
      criterion::BatchSize::SmallInput,
    );
  });
  group.finish();
}

fn bench_point_lookup(c: &mut Criterion) {
  let mut group = c.benchmark_group("GatewayLookup");
  let rt = Runtime::new().unwrap();

  for population in [100usize, 1000].iter() {
    let repo = Arc::new(InMemoryInventory::new());
    let ids: Vec<Uuid> = rt.block_on(async {
      let mut ids = Vec::with_capacity(*population);
      for i in 0..*population {
        ids.push(repo.create_product(numbered_draft(i)).await.unwrap().id);
      }
      ids
    });
    let probe = ids[ids.len() / 2];

    group.throughput(Throughput::Elements(1));
    group.bench_with_input(
      BenchmarkId::new("product_by_id", population),
      population,
      |b, _| {
        b.to_async(&rt).iter(|| {
          let repo = repo.clone();
          async move { repo.product_by_id(probe).await.unwrap() }
        });
      },
    );
  }
  group.finish();
}

fn bench_listing(c: &mut Criterion) {
  let mut group = c.benchmark_group("GatewayList");
  let rt = Runtime::new().unwrap();

  for population in [100usize, 1000].iter() {
    let repo = Arc::new(InMemoryInventory::new());
    rt.block_on(async {
      for i in 0..*population {
        repo.create_product(numbered_draft(i)).await.unwrap();
      }
    });

    group.throughput(Throughput::Elements(*population as u64));
    group.bench_with_input(
      BenchmarkId::new("list_products", population),
      population,
      |b, _| {
        b.to_async(&rt).iter(|| {
          let repo = repo.clone();
          async move { repo.list_products(false).await.unwrap() }
        });
      },
    );
  }
  group.finish();
}

criterion_group!(benches, bench_create_product, bench_point_lookup, bench_listing);
criterion_main!(benches);

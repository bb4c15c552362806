use criterion::{criterion_group, criterion_main, Criterion};
use lpfst::{Cidr4, Lpfst4};
use rand::prelude::*;
use std::collections::HashSet;

const ITERS: usize = 100_000;
const NUM_SPARSE_ADDR: usize = 20;

enum Insn {
    Insert(u32, u8, u32),
    Remove(u32, u8),
    Check(u32, u8),
    CheckAddr(u32),
}

fn min_prefix_len(addr: u32) -> u8 {
    let mut bit: u32 = 0x00000001;
    let mut len: u8 = 32;
    while len > 0 && bit & addr == 0 {
        len = len.saturating_sub(1);
        (bit, _) = bit.overflowing_shl(1);
    }
    len
}

fn random_addr(rng: &mut ThreadRng) -> (u32, u8) {
    let addr: u32 = rng.gen::<u32>();
    let min_len = min_prefix_len(addr);
    let len = rng.gen_range(min_len..=32);
    (addr, len)
}

fn generate_random_mods_dense() -> (Vec<Insn>, HashSet<(u32, u8)>) {
    let mut rng = thread_rng();
    let mut result = Vec::new();
    let mut addresses = HashSet::new();

    for _ in 0..ITERS {
        if addresses.is_empty() || rng.gen_bool(0.8) {
            let (addr, len) = random_addr(&mut rng);
            let val = rng.gen::<u32>();
            result.push(Insn::Insert(addr, len, val));
            addresses.insert((addr, len));
        } else {
            let (addr, len) = addresses
                .iter()
                .choose(&mut rng)
                .map(|(addr, len)| (*addr, *len))
                .unwrap();
            addresses.remove(&(addr, len));
            result.push(Insn::Remove(addr, len));
        }
    }
    (result, addresses)
}

fn generate_random_lookups_dense(addresses: &HashSet<(u32, u8)>) -> Vec<Insn> {
    let mut rng = thread_rng();
    let mut result = Vec::new();

    for _ in 0..ITERS {
        if rng.gen_bool(0.5) {
            let (addr, len) = if addresses.is_empty() || rng.gen_bool(0.5) {
                random_addr(&mut rng)
            } else {
                addresses
                    .iter()
                    .choose(&mut rng)
                    .map(|(addr, len)| (*addr, *len))
                    .unwrap()
            };
            result.push(Insn::Check(addr, len));
        } else {
            let (addr, _) = random_addr(&mut rng);
            result.push(Insn::CheckAddr(addr));
        }
    }
    result
}

fn sparse_addresses() -> Vec<(u32, u8)> {
    let mut rng = thread_rng();
    (0..NUM_SPARSE_ADDR)
        .map(|_| random_addr(&mut rng))
        .collect()
}

fn generate_random_mods_sparse(addresses: &[(u32, u8)]) -> Vec<Insn> {
    let mut rng = thread_rng();
    (0..ITERS)
        .map(|_| {
            let (addr, len) = addresses.iter().choose(&mut rng).unwrap();
            if rng.gen_bool(0.7) {
                let val = rng.gen::<u32>();
                Insn::Insert(*addr, *len, val)
            } else {
                Insn::Remove(*addr, *len)
            }
        })
        .collect()
}

fn generate_random_lookups_sparse(addresses: &[(u32, u8)]) -> Vec<Insn> {
    let mut rng = thread_rng();
    (0..ITERS)
        .map(|_| {
            let (addr, len) = addresses.iter().choose(&mut rng).unwrap();
            if rng.gen_bool(0.5) {
                Insn::Check(*addr, *len)
            } else {
                Insn::CheckAddr(*addr)
            }
        })
        .collect()
}

fn execute(tree: &mut Lpfst4<u32>, insns: &Vec<Insn>) {
    for insn in insns {
        criterion::black_box(match insn {
            Insn::Insert(addr, len, val) => tree.insert(Cidr4::new(*addr, *len), *val),
            Insn::Remove(addr, len) => tree.remove(&Cidr4::new(*addr, *len)),
            Insn::Check(addr, len) => tree.lookup(&Cidr4::new(*addr, *len)).and_then(|m| m.value()).copied(),
            Insn::CheckAddr(addr) => tree.lookup_addr(*addr).copied(),
        });
    }
}

fn lookup(tree: &Lpfst4<u32>, insns: &Vec<Insn>) {
    for insn in insns {
        criterion::black_box(match insn {
            Insn::Insert(_, _, _) => unreachable!(),
            Insn::Remove(_, _) => unreachable!(),
            Insn::Check(addr, len) => tree.lookup(&Cidr4::new(*addr, *len)).and_then(|m| m.value()).copied(),
            Insn::CheckAddr(addr) => tree.lookup_addr(*addr).copied(),
        });
    }
}

pub fn dense_mods(c: &mut Criterion) {
    let (insn, _) = generate_random_mods_dense();

    c.bench_function("dense modification", |b| {
        b.iter(|| {
            let mut tree = Lpfst4::new();
            execute(&mut tree, &insn);
        })
    });
}

pub fn dense_lookup(c: &mut Criterion) {
    let (mods, addrs) = generate_random_mods_dense();
    let lookups = generate_random_lookups_dense(&addrs);

    let mut tree = Lpfst4::new();
    execute(&mut tree, &mods);

    c.bench_function("dense lookups", |b| {
        b.iter(|| {
            lookup(&tree, &lookups);
        })
    });
}

pub fn sparse_mods(c: &mut Criterion) {
    let addrs = sparse_addresses();
    let insn = generate_random_mods_sparse(&addrs);

    c.bench_function("sparse modification", |b| {
        b.iter(|| {
            let mut tree = Lpfst4::new();
            execute(&mut tree, &insn);
        })
    });
}

pub fn sparse_lookup(c: &mut Criterion) {
    let addrs = sparse_addresses();
    let mods = generate_random_mods_sparse(&addrs);
    let lookups = generate_random_lookups_sparse(&addrs);

    let mut tree = Lpfst4::new();
    execute(&mut tree, &mods);

    c.bench_function("sparse lookups", |b| {
        b.iter(|| {
            lookup(&tree, &lookups);
        })
    });
}

criterion_group!(
    benches,
    dense_lookup,
    dense_mods,
    sparse_lookup,
    sparse_mods
);
criterion_main!(benches);

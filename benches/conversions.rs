use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphrepr::{algorithm::*, graph::*};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("30".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("200".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, directed, undirected);
criterion_main!(benches);

fn directed(c: &mut Criterion) {
    cases(c, "directed", true);
}

fn undirected(c: &mut Criterion) {
    cases(c, "undirected", false);
}

fn cases(c: &mut Criterion, prefix: &str, oriented: bool) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let g = random_graph(vertex_size, edge_size, oriented);

    for from in RepresentationKind::ALL {
        for to in RepresentationKind::ALL {
            if from == to {
                continue;
            }
            let mut source = g.clone();
            source.convert(from);
            let name = format!("{}/convert {} to {}", prefix, from, to);
            c.bench_function(&name, |b| {
                b.iter(|| {
                    let mut g = source.clone();
                    g.convert(black_box(to));
                    g
                })
            });
        }
    }

    let mut g = g;
    c.bench_function(&(prefix.to_string() + "/vertices_degree"), |b| {
        b.iter(|| g.vertices_degree(black_box(oriented)))
    });
    c.bench_function(&(prefix.to_string() + "/count_arc_edges"), |b| {
        b.iter(|| g.count_arc_edges(black_box(oriented)))
    });
    for (mode, name) in [
        (SearchMode::RecursiveDfs, "/recursive_dfs"),
        (SearchMode::IterativeDfs, "/iterative_dfs"),
        (SearchMode::IterativeBfs, "/iterative_bfs"),
    ] {
        c.bench_function(&(prefix.to_string() + name), |b| {
            b.iter(|| search(&mut g, vertex_size, mode))
        });
    }
}

fn random_graph(vertex_size: usize, edge_size: usize, oriented: bool) -> Graph {
    let mut matrix: Body = vec![vec![0; vertex_size]; vertex_size];
    for _ in 0..edge_size {
        let u = rand::thread_rng().gen::<usize>() % vertex_size;
        let v = rand::thread_rng().gen::<usize>() % vertex_size;
        if u == v {
            continue;
        }
        matrix[u][v] = 1;
        if !oriented {
            matrix[v][u] = 1;
        }
    }
    Graph::from_adjacency_matrix(matrix)
}

fn search(g: &mut Graph, vertex_size: usize, mode: SearchMode) {
    let start = rand::thread_rng().gen::<usize>() % vertex_size + 1;
    let _ = black_box(g.search(start, mode));
}

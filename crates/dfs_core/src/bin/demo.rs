use dfs_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 0 -- 1 -- 4
    //  \   |
    //   \  |
    //     2 -- 3
    let mut g = Graph::new(5, false);
    g.add_edge(edge!(0 => 1))?;
    g.add_edge(edge!(0 => 2))?;
    g.add_edge(edge!(1 => 2))?;
    g.add_edge(edge!(1 => 4))?;
    g.add_edge(edge!(2 => 3))?;

    g.print_info();
    print!("{}", g);

    let mut dfs = Dfs::new(&g);
    let source = node_index(0);
    let target = node_index(3);

    match dfs.search(source, target)? {
        Some(path) => println!("Path from {} to {}: {}", source, target, path),
        None => println!("No path from {} to {}", source, target),
    }
    println!("{}", dfs.stats);

    Ok(())
}

use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Counters for a single search run.
#[derive(Debug, Default)]
pub struct Stats {
    pub nodes_visited: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl Stats {
    pub fn init(&mut self) {
        self.nodes_visited = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes visited in {:?}",
            self.nodes_visited, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::node_index;
    use crate::search::dfs::Dfs;
    use crate::util::test_graphs::generate_demo_graph;

    #[test]
    fn stats_work() {
        let g = generate_demo_graph();

        let mut dfs = Dfs::new(&g);
        dfs.search(node_index(0), node_index(3)).unwrap();

        assert!(dfs.stats.duration.is_some());
        // 0 -> 1 -> 2 -> 3, nothing off-path is entered.
        assert_eq!(dfs.stats.nodes_visited, 4);

        // A fresh search resets the counters.
        dfs.search(node_index(4), node_index(4)).unwrap();
        assert_eq!(dfs.stats.nodes_visited, 1);
    }
}

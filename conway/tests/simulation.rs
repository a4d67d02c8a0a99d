use conway::patterns::{GLIDER, apply_pattern};
use conway::{Config, Grid, Rule, Simulation};

fn live(simulation: &Simulation) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = simulation.snapshot().live_cells().collect();
    cells.sort();
    cells
}

fn shifted(cells: &[(usize, usize)], by: usize) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = cells.iter().map(|&(x, y)| (x + by, y + by)).collect();
    cells.sort();
    cells
}

#[test]
fn glider_travels_diagonally() {
    for rule in [Rule::NeighborBased, Rule::SeedBased] {
        for threads in [1, 3, 4] {
            let mut grid = Grid::dead(16);
            apply_pattern(&mut grid, &GLIDER);
            let mut simulation = Simulation::from_grid(grid, rule, threads).unwrap();

            for lap in 1..=3 {
                for _ in 0..4 {
                    simulation.step();
                }
                assert_eq!(live(&simulation), shifted(GLIDER.cells, lap), "{rule}, {threads} threads, lap {lap}");
            }
        }
    }
}

#[test]
fn both_rules_agree_on_random_soup() {
    let config = Config { size: 48, chance: 0.35, seed: Some(2024), thread_count: 5, glider: false, ..Config::default() };
    let mut neighbor_based = Simulation::new(&config).unwrap();
    let mut seed_based = Simulation::new(&Config { rule: Rule::SeedBased, ..config }).unwrap();
    assert_eq!(neighbor_based.snapshot(), seed_based.snapshot());

    for _ in 0..20 {
        let a = neighbor_based.step();
        let b = seed_based.step();
        assert_eq!(a.population, b.population);
        assert_eq!(neighbor_based.snapshot(), seed_based.snapshot());
    }
}

#[test]
fn blinker_is_reported_as_repeating() {
    let grid = Grid::from_live_cells(5, &[(1, 2), (2, 2), (3, 2)]);
    let mut simulation = Simulation::from_grid(grid, Rule::NeighborBased, 2).unwrap();

    let first = simulation.step();
    assert!(!first.repeated);
    assert_eq!(live(&simulation), vec![(2, 1), (2, 2), (2, 3)]);

    let second = simulation.step();
    assert!(second.repeated);
    assert_eq!(live(&simulation), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn dead_grid_stays_dead_with_many_workers() {
    let config = Config { size: 17, chance: 0.0, glider: false, thread_count: 6, ..Config::default() };
    let mut simulation = Simulation::new(&config).unwrap();
    for _ in 0..10 {
        assert_eq!(simulation.step().population, 0);
    }
}

#[test]
fn more_workers_than_rows() {
    let grid = Grid::from_live_cells(3, &[(0, 1), (1, 1), (2, 1)]);
    let mut simulation = Simulation::from_grid(grid, Rule::SeedBased, 8).unwrap();
    simulation.step();
    assert_eq!(live(&simulation), vec![(1, 0), (1, 1), (1, 2)]);
}

use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn get_input() -> Vec<u8> {
    std::fs::read(format!(
        "{}/resources/two_players.Civ7Save",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

pub mod container {
    use civ7_save::SaveContainer;
    use divan::Bencher;

    #[divan::bench]
    fn load(bencher: Bencher) {
        bencher.with_inputs(super::get_input).bench_refs(|data| {
            divan::black_box(SaveContainer::load(data).unwrap());
        });
    }

    #[divan::bench]
    fn serialize(bencher: Bencher) {
        let save = SaveContainer::load(&super::get_input()).unwrap();
        bencher.bench_local(move || {
            divan::black_box(save.serialize().unwrap());
        });
    }
}

pub mod scan {
    use civ7_save::{markers::GOLD_MARKER, scan::find_positions, SaveContainer};
    use divan::Bencher;

    #[divan::bench]
    fn gold_markers(bencher: Bencher) {
        let save = SaveContainer::load(&super::get_input()).unwrap();
        bencher.bench_local(move || {
            divan::black_box(find_positions(save.body(), &GOLD_MARKER, 24, 8));
        });
    }
}

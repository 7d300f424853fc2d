#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lutsearch::index::{LutKey, SearchIndex, SearchStrategy};

#[derive(Arbitrary, Debug)]
struct Input {
    bits: u8,
    unsigned: Vec<u32>,
    signed: Vec<i32>,
    floats: Vec<f32>,
    probes: Vec<u32>,
}

fn check<T: LutKey>(values: &[T], bits: u32, probes: impl Iterator<Item = T>) {
    let Ok(index) = SearchIndex::new(values, bits) else {
        return;
    };
    for key in values.iter().copied().chain(probes) {
        let expected = index.reference_search(key);
        for strategy in SearchStrategy::ALL {
            assert_eq!(index.search(strategy, key), expected, "{} on {:?}", strategy, key);
        }
    }
}

fuzz_target!(|input: Input| {
    // Keep tables small; width does not change results.
    let bits = (input.bits % 16) as u32;

    let mut unsigned = input.unsigned;
    unsigned.sort_unstable();
    check(&unsigned, bits, input.probes.iter().copied());

    let mut signed = input.signed;
    signed.sort_unstable();
    check(&signed, bits, input.probes.iter().map(|&p| p as i32));

    // NaN and negative zero are outside the mapping contract
    let mut floats: Vec<f32> = input
        .floats
        .into_iter()
        .filter(|f| !f.is_nan())
        .map(|f| if f == 0.0 { 0.0 } else { f })
        .collect();
    floats.sort_by(f32::total_cmp);
    let float_probes = input
        .probes
        .iter()
        .map(|&p| f32::from_bits(p))
        .filter(|f| !f.is_nan() && *f != 0.0);
    check(&floats, bits, float_probes);
});

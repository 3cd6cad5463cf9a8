#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe and decode must never panic
    let _ = zentga::probe(data);
    let Ok(image) = zentga::decode(data, enough::Unstoppable) else {
        return;
    };

    // Any decoded image must resample with every method
    let divisor = u32::from(data.first().copied().unwrap_or(1) % 8) + 1;
    for method in zentga::ResampleMethod::ALL {
        let _ = zentga::resample(&image, divisor, method, enough::Unstoppable);
    }
});

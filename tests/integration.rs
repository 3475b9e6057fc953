use vellum::{BitMixCoder, ByteMixCoder, Order0Coder, PpmCoder};

fn sample_corpus() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        vec![0xFF; 300],
        b"the quick brown fox jumps over the lazy dog".to_vec(),
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_vec(),
        b"the quick brown fox jumps over the lazy dog. ".repeat(200),
        (0u32..4096).map(|i| (i % 256) as u8).collect(),
    ]
}

#[test]
fn order0_round_trips_the_sample_corpus() {
    let coder = Order0Coder::new();
    for data in sample_corpus() {
        let packed = coder.compress(&data);
        assert_eq!(coder.decompress(&packed).unwrap(), data);
    }
}

#[test]
fn ppm_round_trips_the_sample_corpus_at_several_orders() {
    for order in [0u8, 2, 4, 6] {
        let coder = PpmCoder::new(order);
        for data in sample_corpus() {
            let packed = coder.compress(&data);
            assert_eq!(coder.decompress(&packed).unwrap(), data, "order={}", order);
        }
    }
}

#[test]
fn bytemix_round_trips_the_sample_corpus() {
    let coder = ByteMixCoder::new();
    for data in sample_corpus() {
        let packed = coder.compress(&data);
        assert_eq!(coder.decompress(&packed).unwrap(), data);
    }
}

#[test]
fn bitmix_round_trips_the_sample_corpus() {
    let coder = BitMixCoder::new();
    for data in sample_corpus() {
        let packed = coder.compress(&data);
        assert_eq!(coder.decompress(&packed).unwrap(), data);
    }
}

#[test]
fn repetitive_text_compresses_well_under_every_method() {
    let data = b"abababababababababababababababababababababababababababababab".repeat(50);

    let methods: Vec<(&str, Vec<u8>)> = vec![
        ("order0", Order0Coder::new().compress(&data)),
        ("ppm", PpmCoder::new(4).compress(&data)),
        ("bytemix", ByteMixCoder::new().compress(&data)),
        ("bitmix", BitMixCoder::new().compress(&data)),
    ];

    for (name, packed) in methods {
        assert!(packed.len() < data.len() / 4, "{} compressed to {} bytes", name, packed.len());
    }
}

#[test]
fn ppm_corrupt_stream_header_is_reported_not_panicked() {
    let coder = PpmCoder::new(4);
    let truncated = [0u8, 1, 2];
    assert!(coder.decompress(&truncated).is_err());
}

use loyopt::{AnyOption, Opt, OptionParser, OptionStatus};

const ARGS: &[&str] = &[
    "./test_loyopt",
    "-?",
    "-ab",
    "-c",
    "~/Documents/Work Files/foo.txt",
    "--string_d_typo",
    "--int32_f",
    "123456",
    "-g",
    "1000",
    "-h",
    "0xa5A5",
    "--int32_i",
    "0x5x5x",
    "-j",
    "-10",
    "--float_l",
    "3.1416",
    "opps",
    "-n",
];

#[test]
fn full_example_command_line() {
    let mut help = Opt::flag("-?").alt("--help").help("Print this help info.");
    let mut a = Opt::flag("-a");
    let mut b = Opt::flag("-b").alt("--bool_b");
    let mut c = Opt::new("./path/file_c".to_string(), "-c");
    let mut d = Opt::new("a string for d".to_string(), "-d").alt("--string_d");
    let mut e = Opt::new(0i32, "-e");
    let mut f = Opt::new(0i32, "--int32_f");
    let mut g = Opt::new(50i32, "-g").alt("--int32_g").range(0, 100);
    let mut h = Opt::new(0i32, "-h").alt("--int32_h").base(16);
    let mut i = Opt::new(0i32, "--int32_i").base(16).range(0, 0xffff);
    let mut j = Opt::new(150u32, "-j").alt("--uint32_j").range(100, 200);
    let mut k = Opt::new(0i64, "--int64_k").range(-10_000_000_000, 10_000_000_000);
    let mut l = Opt::new(0f32, "-l").alt("--float_l");
    let mut m = Opt::new(0f32, "--float_m").range(-10.0, 100.0);
    let mut n = Opt::new(0f64, "-n").alt("--double_n");

    let mut parser = OptionParser::new(ARGS.iter().copied());
    assert_eq!(parser.exec_name(), "test_loyopt");

    assert_eq!(parser.parse(&mut help), OptionStatus::Parsed);
    assert!(*help.value());
    assert_eq!(help.last_matched_name(), "-?");

    assert_eq!(parser.parse(&mut a), OptionStatus::Parsed);
    assert!(*a.value());
    assert_eq!(parser.parse(&mut b), OptionStatus::Parsed);
    assert!(*b.value());

    assert_eq!(parser.parse(&mut c), OptionStatus::Parsed);
    assert_eq!(c.value(), "~/Documents/Work Files/foo.txt");

    assert_eq!(parser.parse(&mut d), OptionStatus::NotFound);
    assert_eq!(d.value(), "a string for d");
    assert_eq!(parser.parse(&mut e), OptionStatus::NotFound);

    assert_eq!(parser.parse(&mut f), OptionStatus::Parsed);
    assert_eq!(*f.value(), 123456);

    assert_eq!(parser.parse(&mut g), OptionStatus::ClampedMax);
    assert_eq!(*g.value(), 100);
    assert_eq!(g.summary(), "[Clamped To Max] -g, --int32_g = 100");

    assert_eq!(parser.parse(&mut h), OptionStatus::Parsed);
    assert_eq!(*h.value(), 0xa5a5);
    assert_eq!(h.summary(), "[Parsed Success] -h, --int32_h = 0xa5a5");

    assert_eq!(parser.parse(&mut i), OptionStatus::ValueInvalid);
    assert_eq!(*i.value(), 0);

    assert_eq!(parser.parse(&mut j), OptionStatus::ClampedMin);
    assert_eq!(*j.value(), 100);

    assert_eq!(parser.parse(&mut k), OptionStatus::NotFound);

    assert_eq!(parser.parse(&mut l), OptionStatus::Parsed);
    assert!((*l.value() - 3.1416).abs() < 1e-6);
    assert_eq!(l.last_matched_name(), "--float_l");

    assert_eq!(parser.parse(&mut m), OptionStatus::NotFound);

    assert_eq!(parser.parse(&mut n), OptionStatus::ValueNotFound);
    assert_eq!(*n.value(), 0.0);

    assert_eq!(parser.first_unparsed_arg(), "--string_d_typo");
    assert_eq!(parser.unparsed_args(), vec!["--string_d_typo", "opps"]);
}

#[test]
fn bulk_parse_through_non_owning_view() {
    let mut help = Opt::flag("-?").alt("--help");
    let mut g = Opt::new(50i32, "-g").range(0, 100);
    let mut n = Opt::new(0f64, "-n");

    let mut parser = OptionParser::new(["prog", "--help", "-g", "7", "-n"]);
    let parsed = parser.parse_all(&mut [&mut help, &mut g, &mut n]);
    assert_eq!(parsed, 2);

    let view: [&dyn AnyOption; 3] = [&help, &g, &n];
    let statuses: Vec<_> = view.iter().map(|o| o.decl().status()).collect();
    assert_eq!(
        statuses,
        vec![OptionStatus::Parsed, OptionStatus::Parsed, OptionStatus::ValueNotFound]
    );
}

#[test]
fn range_boundaries() {
    let cases: &[(&str, OptionStatus, i32)] = &[
        ("0", OptionStatus::Parsed, 0),
        ("100", OptionStatus::Parsed, 100),
        ("101", OptionStatus::ClampedMax, 100),
        ("-1", OptionStatus::ClampedMin, 0),
        ("99999999999999999999", OptionStatus::ClampedMax, 100),
        ("-99999999999999999999", OptionStatus::ClampedMin, 0),
    ];
    for &(text, status, value) in cases {
        let mut g = Opt::new(50i32, "-g").range(0, 100);
        let mut parser = OptionParser::new(["prog", "-g", text]);
        assert_eq!(parser.parse(&mut g), status, "input {:?}", text);
        assert_eq!(*g.value(), value, "input {:?}", text);
    }
}

#[test]
fn unsigned_full_range_clamps_negative_input() {
    let mut u = Opt::new(5u32, "-u");
    let mut parser = OptionParser::new(["prog", "-u", "-3"]);
    assert_eq!(parser.parse(&mut u), OptionStatus::ClampedMin);
    assert_eq!(*u.value(), 0);
}

#[test]
fn float_special_values() {
    let mut nan = Opt::new(1.5f64, "-x");
    let mut inf = Opt::new(1.5f64, "-y").range(-1.0, 1.0);
    let mut parser = OptionParser::new(["prog", "-x", "nan", "-y", "inf"]);
    assert_eq!(parser.parse(&mut nan), OptionStatus::ValueInvalid);
    assert_eq!(*nan.value(), 1.5);
    assert_eq!(parser.parse(&mut inf), OptionStatus::ClampedMax);
    assert_eq!(*inf.value(), 1.0);
}

#[test]
fn rendered_values_parse_back_to_themselves() {
    for text in ["0", "2a", "0x7f", "A5A5", "7fffffff"] {
        let mut first = Opt::new(1i32, "-i").base(16);
        OptionParser::new(["prog", "-i", text]).parse(&mut first);
        assert_eq!(first.status(), OptionStatus::Parsed, "input {:?}", text);

        let rendered = first.value_string(Some("%x")).unwrap();
        let mut second = Opt::new(1i32, "-i").base(16);
        OptionParser::new(["prog", "-i", rendered.as_str()]).parse(&mut second);
        assert_eq!(second.status(), OptionStatus::Parsed);
        assert_eq!(second.value(), first.value(), "input {:?}", text);
    }

    for text in ["0", "123456", "-987654321", "9223372036854775807"] {
        let mut first = Opt::new(0i64, "-k");
        OptionParser::new(["prog", "-k", text]).parse(&mut first);
        let rendered = first.value_string(None).unwrap();
        let mut second = Opt::new(0i64, "-k");
        OptionParser::new(["prog", "-k", rendered.as_str()]).parse(&mut second);
        assert_eq!(second.status(), OptionStatus::Parsed);
        assert_eq!(second.value(), first.value(), "input {:?}", text);
    }

    for text in ["3.1416", "-0.001", "1e10", "0x1.8p1", "12345.678"] {
        let mut first = Opt::new(0f64, "-d");
        OptionParser::new(["prog", "-d", text]).parse(&mut first);
        assert_eq!(first.status(), OptionStatus::Parsed, "input {:?}", text);
        let rendered = first.value_string(Some("%.17g")).unwrap();
        let mut second = Opt::new(0f64, "-d");
        OptionParser::new(["prog", "-d", rendered.as_str()]).parse(&mut second);
        assert_eq!(second.status(), OptionStatus::Parsed);
        let (a, b) = (*first.value(), *second.value());
        assert!((a - b).abs() <= a.abs() * 1e-15, "{} vs {}", a, b);
    }

    for text in ["3.1416", "0.5", "-250.125"] {
        let mut first = Opt::new(0f32, "-f");
        OptionParser::new(["prog", "-f", text]).parse(&mut first);
        let rendered = first.value_string(None).unwrap();
        let mut second = Opt::new(0f32, "-f");
        OptionParser::new(["prog", "-f", rendered.as_str()]).parse(&mut second);
        let (a, b) = (*first.value(), *second.value());
        assert!((a - b).abs() <= a.abs() * 1e-6, "{} vs {}", a, b);
    }
}

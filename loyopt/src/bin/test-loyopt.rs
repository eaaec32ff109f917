// Test binary exercising every option kind against the process arguments.
//
// Typical invocation:
//   test-loyopt -? -ab -c "~/Documents/Work Files/foo.txt" --string_d_typo \
//     --int32_f 123456 -g 1000 -h 0xa5A5 --int32_i 0x5x5x -j -10 \
//     --float_l 3.1416 opps -n
//
// Build with `--features runner`.

use loyopt::{AnyOption, Opt, OptionParser, OptionStatus, Result};
use tracing_subscriber::{fmt, EnvFilter};

struct Options {
    help: Opt<bool>,
    bool_a: Opt<bool>,
    bool_b: Opt<bool>,
    string_c: Opt<String>,
    string_d: Opt<String>,
    int32_e: Opt<i32>,
    int32_f: Opt<i32>,
    int32_g: Opt<i32>,
    int32_h: Opt<i32>,
    int32_i: Opt<i32>,
    uint32_j: Opt<u32>,
    int64_k: Opt<i64>,
    float_l: Opt<f32>,
    float_m: Opt<f32>,
    double_n: Opt<f64>,
}

impl Options {
    fn new() -> Self {
        Options {
            help: Opt::flag("-?").alt("--help").help("Print this help info."),
            bool_a: Opt::flag("-a")
                .help("Test option a, option value will be true if exists in args."),
            bool_b: Opt::flag("-b")
                .alt("--bool_b")
                .help("Test option b, help info line 1,")
                .help("    help info line 2.")
                .help("    help info line 3."),
            string_c: Opt::new("./path/file_c".to_string(), "-c")
                .help("Test option c, string option can be used for paths.")
                .help("e.g.: -c ~/abc/def.txt, -c \"abc def/g h i.txt\", -c abc\\ def/g\\ h\\ i.txt."),
            string_d: Opt::new("a string for d".to_string(), "-d")
                .alt("--string_d")
                .help("Test option d, or can be used for special formatted data.")
                .help("e.g.: AC2022-12-01, and it's user's responsibility to parse the value string."),
            int32_e: Opt::new(0i32, "-e").help("Test option e, an integer option."),
            int32_f: Opt::new(0i32, "--int32_f").help("Test option f, an integer option."),
            int32_g: Opt::new(50i32, "-g")
                .alt("--int32_g")
                .range(0, 100)
                .help("Test option g, an integer option."),
            int32_h: Opt::new(0i32, "-h")
                .alt("--int32_h")
                .base(16)
                .help("Test option h, an integer option."),
            int32_i: Opt::new(0i32, "--int32_i")
                .base(16)
                .range(0, 0xffff)
                .help("Test option i, value string must be in hex,")
                .help("    can be with or without prefix \"0x\",")
                .help("    can be upper or lower case."),
            uint32_j: Opt::new(150u32, "-j")
                .alt("--uint32_j")
                .range(100, 200)
                .help("Test option j, an unsigned integer."),
            int64_k: Opt::new(0i64, "--int64_k")
                .range(-10_000_000_000, 10_000_000_000)
                .help("Test option k, a 64bit integer option."),
            float_l: Opt::new(0f32, "-l")
                .alt("--float_l")
                .help("Test option l, a float option."),
            float_m: Opt::new(0f32, "--float_m")
                .range(-10.0, 100.0)
                .help("Test option m, a float option."),
            double_n: Opt::new(0f64, "-n")
                .alt("--double_n")
                .help("Test option n, a double option."),
        }
    }

    fn all(&self) -> [&dyn AnyOption; 15] {
        [
            &self.help,
            &self.bool_a,
            &self.bool_b,
            &self.string_c,
            &self.string_d,
            &self.int32_e,
            &self.int32_f,
            &self.int32_g,
            &self.int32_h,
            &self.int32_i,
            &self.uint32_j,
            &self.int64_k,
            &self.float_l,
            &self.float_m,
            &self.double_n,
        ]
    }

    fn all_mut(&mut self) -> [&mut dyn AnyOption; 15] {
        [
            &mut self.help,
            &mut self.bool_a,
            &mut self.bool_b,
            &mut self.string_c,
            &mut self.string_d,
            &mut self.int32_e,
            &mut self.int32_f,
            &mut self.int32_g,
            &mut self.int32_h,
            &mut self.int32_i,
            &mut self.uint32_j,
            &mut self.int64_k,
            &mut self.float_l,
            &mut self.float_m,
            &mut self.double_n,
        ]
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut opts = Options::new();
    let mut parser = OptionParser::from_env();

    for opt in opts.all_mut() {
        let status = parser.parse(&mut *opt);
        let decl = opt.decl();
        println!("{}", decl.summary());
        match status {
            OptionStatus::ClampedMin | OptionStatus::ClampedMax => println!(
                "    option value for \"{}\" is out of range, has been clamped to {}.",
                decl.last_matched_name(),
                decl.value_string(None)?
            ),
            OptionStatus::ValueInvalid => println!(
                "    option value for \"{}\" is invalid.",
                decl.last_matched_name()
            ),
            OptionStatus::ValueNotFound => println!(
                "    option \"{}\" is missing its value.",
                decl.last_matched_name()
            ),
            _ => {}
        }
    }

    let first = parser.first_unparsed_arg();
    if !first.is_empty() {
        println!("Unrecognised option \"{}\" found, please check your command line.", first);
    }
    let unparsed = parser.unparsed_args();
    if !unparsed.is_empty() {
        println!("There is/are {} unparsed args.", unparsed.len());
        for arg in &unparsed {
            println!("     {}", arg);
        }
    }

    if *opts.help.value() {
        println!("\"{}\" found, show help infos:", opts.help.last_matched_name());
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        parser.write_help(&mut out, &opts.all())?;
    }

    if *opts.bool_a.value() {
        println!("{} exists, do something...", opts.bool_a.name());
    }
    if opts.float_l.status() == OptionStatus::Parsed {
        let l = *opts.float_l.value();
        println!("square of float_l = {}", l * l);
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use screenplay_writer::{
    classify_text, layout_pages, write_export, Autosaver, Conf, ExportError, ExportFormat,
    FileStore, Session, SnapshotStore, Snippet,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "screenplay-writer", version, about = "纯文本剧本工具")]
struct Cli {
    /// JSON 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 输出每一行的段落类型
    Classify { file: PathBuf },
    /// 导出为 txt / fountain / fdx / pdf / breakdown
    Export {
        file: PathBuf,
        #[arg(long, short, default_value = "txt")]
        format: ExportFormat,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// 以 JSON 输出分页排版的绘制指令
    Layout { file: PathBuf },
    /// 重新为场景标题编号
    NumberScenes {
        file: PathBuf,
        #[arg(long)]
        in_place: bool,
    },
    /// 输出场景与角色拆解
    Breakdown { file: PathBuf },
    /// 输出格式化片段
    Snippet { key: String },
    /// 把文件存入自动保存槽
    Save {
        file: PathBuf,
        #[arg(long)]
        store_dir: PathBuf,
    },
    /// 读出自动保存槽的内容
    Restore {
        #[arg(long)]
        store_dir: PathBuf,
    },
}

async fn open(file: &PathBuf) -> Result<Session, ExportError> {
    let mut session = Session::new();
    session.load_file(file).await?;
    Ok(session)
}

async fn run(cli: Cli) -> Result<(), ExportError> {
    let conf = match &cli.config {
        Some(path) => Conf::from_json_file(path)?,
        None => Conf::default(),
    };

    match cli.command {
        Command::Classify { file } => {
            let session = open(&file).await?;
            for (i, (text, paragraph_type)) in classify_text(session.text()).iter().enumerate() {
                println!("{:>5} {:<14} {}", i + 1, paragraph_type.fdx_name(), text);
            }
        }
        Command::Export {
            file,
            format,
            output,
        } => {
            let session = open(&file).await?;
            let output = output.unwrap_or_else(|| PathBuf::from(format.file_name()));
            write_export(&session.snapshot(), format, &output, &conf).await?;
            println!("导出完成: {}", output.display());
        }
        Command::Layout { file } => {
            let session = open(&file).await?;
            let layout = layout_pages(session.text(), &conf);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::NumberScenes { file, in_place } => {
            let mut session = open(&file).await?;
            session.number_scenes();
            if in_place {
                tokio::fs::write(&file, session.text()).await?;
                println!("已重新编号: {}", file.display());
            } else {
                print!("{}", session.text());
            }
        }
        Command::Breakdown { file } => {
            let session = open(&file).await?;
            let exported = session.export(ExportFormat::Breakdown, &conf);
            println!("{}", String::from_utf8_lossy(&exported.bytes));
        }
        Command::Snippet { key } => match Snippet::from_key(&key) {
            Some(snippet) => print!("{}", snippet.text()),
            None => log::warn!("未知的片段: {}", key),
        },
        Command::Save { file, store_dir } => {
            let store: Arc<dyn SnapshotStore> = Arc::new(FileStore::new(store_dir));
            let mut session = Session::new();
            session.attach_autosave(Autosaver::from_conf(store, &conf));
            if let Err(e) = session.load_file(&file).await {
                // 读取失败时保留原文本
                log::warn!("读取文件失败: {}", e);
                return Err(e.into());
            }
            if let Some(autosaver) = session.autosaver_mut() {
                autosaver.flush().await;
                println!("{}", autosaver.status().label());
            }
        }
        Command::Restore { store_dir } => {
            let store = FileStore::new(store_dir);
            let mut session = Session::new();
            if session.restore(&store, &conf.autosave_key)? {
                print!("{}", session.text());
            } else {
                log::info!("没有自动保存的内容");
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}

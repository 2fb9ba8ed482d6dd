use tracing::info;
use xor_nn::{
    logging::init_logging, mean_squared_error, mean_squared_output, predictions, train_loop,
    xor_examples, Result, TrainConfig,
};

fn main() -> Result<()> {
    init_logging()?;

    let config = TrainConfig::default();
    let examples = xor_examples();
    let mut weights = config.initial_weights();

    train_loop(&mut weights, &examples, &config)?;

    for prediction in predictions(&weights, &examples) {
        println!("{prediction}");
    }
    // `Error:` is the mean of the squared raw outputs; the loss against the
    // targets only goes to the log.
    println!("Error: {}", mean_squared_output(&weights, &examples)?);
    let mse = mean_squared_error(&weights, &examples)?;
    info!(mse, "loss against targets");

    Ok(())
}

mod blocks;
mod inline;

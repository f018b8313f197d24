mod committed_index;
